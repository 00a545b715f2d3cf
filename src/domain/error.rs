//! Domain error types.

/// Top-level error type for dcasim.
#[derive(Debug, thiserror::Error)]
pub enum DcasimError {
    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("invalid parameter {field}: {reason}")]
    InvalidParameters { field: String, reason: String },

    #[error(
        "insufficient data: {points} price points after filtering, need {minimum}. \
         Select a wider date range."
    )]
    InsufficientData { points: usize, minimum: usize },

    #[error("unknown asset: {id}")]
    UnknownAsset { id: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&DcasimError> for std::process::ExitCode {
    fn from(err: &DcasimError) -> Self {
        let code: u8 = match err {
            DcasimError::Io(_) => 1,
            DcasimError::ConfigParse { .. }
            | DcasimError::ConfigMissing { .. }
            | DcasimError::ConfigInvalid { .. } => 2,
            DcasimError::Data { .. } | DcasimError::UnknownAsset { .. } => 3,
            DcasimError::InvalidParameters { .. } => 4,
            DcasimError::InsufficientData { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameters_display() {
        let err = DcasimError::InvalidParameters {
            field: "base_budget".into(),
            reason: "must be positive".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid parameter base_budget: must be positive"
        );
    }

    #[test]
    fn insufficient_data_display_mentions_range() {
        let err = DcasimError::InsufficientData {
            points: 1,
            minimum: 2,
        };
        assert!(err.to_string().contains("wider date range"));
    }

    #[test]
    fn exit_codes_are_distinct_per_class() {
        use std::process::ExitCode;

        let io: ExitCode = (&DcasimError::Io(std::io::Error::other("x"))).into();
        let config: ExitCode = (&DcasimError::ConfigMissing {
            section: "simulation".into(),
            key: "start_date".into(),
        })
            .into();
        let data: ExitCode = (&DcasimError::Data {
            reason: "bad row".into(),
        })
            .into();
        let params: ExitCode = (&DcasimError::InvalidParameters {
            field: "end_date".into(),
            reason: "before start_date".into(),
        })
            .into();
        let insufficient: ExitCode = (&DcasimError::InsufficientData {
            points: 0,
            minimum: 2,
        })
            .into();

        // ExitCode has no accessor, so compare debug formatting.
        let codes = [io, config, data, params, insufficient];
        let rendered: Vec<String> = codes.iter().map(|c| format!("{c:?}")).collect();
        for (i, a) in rendered.iter().enumerate() {
            for b in rendered.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
