use crate::error::SolveError;

/// The concrete resource kinds this client knows about, selected by the
/// server's `class_name` discriminator.
///
/// The table is closed and lives in the `match` arms below; unrecognized
/// discriminators fall back to [`ResourceKind::Generic`] so new server-side
/// types degrade to untyped objects instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Depository,
    DepositoryVersion,
    Dataset,
    DatasetField,
    User,
    /// Marker the server uses for paged list responses.
    List,
    /// Catch-all for unrecognized or missing discriminators.
    Generic,
}

impl ResourceKind {
    /// Look up a kind by discriminator value. Total: anything unrecognized
    /// maps to `Generic`.
    pub fn from_class_name(name: &str) -> ResourceKind {
        match name {
            "Depository" => ResourceKind::Depository,
            "DepositoryVersion" => ResourceKind::DepositoryVersion,
            "Dataset" => ResourceKind::Dataset,
            "DatasetField" => ResourceKind::DatasetField,
            "User" => ResourceKind::User,
            "list" => ResourceKind::List,
            _ => ResourceKind::Generic,
        }
    }

    /// Name used in URLs and error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ResourceKind::Depository => "Depository",
            ResourceKind::DepositoryVersion => "DepositoryVersion",
            ResourceKind::Dataset => "Dataset",
            ResourceKind::DatasetField => "DatasetField",
            ResourceKind::User => "User",
            ResourceKind::List => "list",
            ResourceKind::Generic => "SolveObject",
        }
    }

    /// Base URL for list/create operations on this kind.
    ///
    /// Pluralized (trailing `y` becomes `ies`) and underscore-separated
    /// under the API version path. `User` is a singleton: no plural, no ID
    /// suffix. The generic and list kinds have no collection and fail.
    pub fn collection_url(&self) -> Result<String, SolveError> {
        let name = match self {
            ResourceKind::Generic | ResourceKind::List => {
                return Err(SolveError::AbstractResource(self.type_name()));
            }
            ResourceKind::User => {
                return Ok(format!("/v1/{}", camelcase_to_underscore(self.type_name())));
            }
            _ => self.type_name(),
        };

        let plural = match name.strip_suffix('y') {
            Some(stem) => format!("{stem}ies"),
            None => format!("{name}s"),
        };
        Ok(format!("/v1/{}", camelcase_to_underscore(&plural)))
    }

    /// Number of path segments a URN of this kind carries after the scheme.
    pub fn urn_segments(&self) -> Option<usize> {
        match self {
            ResourceKind::Depository => Some(1),
            ResourceKind::DepositoryVersion => Some(2),
            ResourceKind::Dataset => Some(3),
            ResourceKind::DatasetField => Some(4),
            _ => None,
        }
    }

    /// Human-readable URN template, shown in error messages.
    pub fn urn_format(&self) -> Option<&'static str> {
        match self {
            ResourceKind::Depository => Some("urn:solvebio:{DEPOSITORY}"),
            ResourceKind::DepositoryVersion => Some("urn:solvebio:{DEPOSITORY}:{VERSION}"),
            ResourceKind::Dataset => Some("urn:solvebio:{DEPOSITORY}:{VERSION}:{DATASET}"),
            ResourceKind::DatasetField => {
                Some("urn:solvebio:{DEPOSITORY}:{VERSION}:{DATASET}:{FIELD}")
            }
            _ => None,
        }
    }
}

fn camelcase_to_underscore(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() && i > 0 {
            out.push('_');
        }
        out.push(ch.to_ascii_lowercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_urls_are_pluralized_snake_case() {
        assert_eq!(
            ResourceKind::Depository.collection_url().unwrap(),
            "/v1/depositories"
        );
        assert_eq!(
            ResourceKind::DepositoryVersion.collection_url().unwrap(),
            "/v1/depository_versions"
        );
        assert_eq!(
            ResourceKind::Dataset.collection_url().unwrap(),
            "/v1/datasets"
        );
        assert_eq!(
            ResourceKind::DatasetField.collection_url().unwrap(),
            "/v1/dataset_fields"
        );
    }

    #[test]
    fn singleton_url_has_no_plural() {
        assert_eq!(ResourceKind::User.collection_url().unwrap(), "/v1/user");
    }

    #[test]
    fn abstract_kinds_have_no_collection() {
        assert!(matches!(
            ResourceKind::Generic.collection_url(),
            Err(SolveError::AbstractResource("SolveObject"))
        ));
        assert!(matches!(
            ResourceKind::List.collection_url(),
            Err(SolveError::AbstractResource("list"))
        ));
    }

    #[test]
    fn unknown_discriminators_fall_back_to_generic() {
        assert_eq!(ResourceKind::from_class_name("Dataset"), ResourceKind::Dataset);
        assert_eq!(ResourceKind::from_class_name("list"), ResourceKind::List);
        assert_eq!(
            ResourceKind::from_class_name("BrandNewServerType"),
            ResourceKind::Generic
        );
        assert_eq!(ResourceKind::from_class_name(""), ResourceKind::Generic);
    }
}
