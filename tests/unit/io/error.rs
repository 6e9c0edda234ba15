//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use gridwright::{GridError, Vec3};
    use gridwright::io::error::{computation_error, invalid_parameter};
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = GridError::FileSystem {
            path: "/tmp/grids.json".into(),
            operation: "read snapshot",
            source: io_error,
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("read snapshot"));
        assert!(message.contains("/tmp/grids.json"));
    }

    #[test]
    fn test_serialization_error_keeps_source() {
        let Err(json_error) = serde_json::from_str::<u32>("not json") else {
            unreachable!("invalid JSON must fail to parse");
        };
        let error: GridError = json_error.into();

        assert!(matches!(error, GridError::Serialization { .. }));
        assert!(error.source().is_some());
    }

    // Tests InvalidLayout error names every layout parameter
    // Verified by omitting cell size from message
    #[test]
    fn test_invalid_layout_message() {
        let error = GridError::InvalidLayout {
            columns: 3,
            rows: 0,
            cell_size: 1.5,
        };

        let message = error.to_string();
        assert!(message.contains("3x0"));
        assert!(message.contains("1.5"));
        assert!(error.source().is_none());
    }

    #[test]
    fn test_invalid_dimension_message() {
        let error = GridError::InvalidDimension {
            dimension: "height",
            value: -2.0,
        };

        let message = error.to_string();
        assert!(message.contains("height"));
        assert!(message.contains("-2"));
    }

    #[test]
    fn test_layout_limit_and_position_messages() {
        let too_large = GridError::LayoutTooLarge {
            columns: 5000,
            rows: 5000,
            limit: 100,
        };
        let message = too_large.to_string();
        assert!(message.contains("5000x5000"));
        assert!(message.contains("100"));

        let position = GridError::InvalidPosition {
            position: Vec3::new(f32::INFINITY, 0.0, 1.0),
        };
        assert!(position.to_string().contains("inf"));
        assert!(position.source().is_none());
    }

    #[test]
    fn test_lookup_error_messages() {
        assert!(GridError::GridNotFound { id: 9 }.to_string().contains('9'));
        assert!(
            GridError::DuplicateGridId { id: 4 }
                .to_string()
                .contains("more than once")
        );
        assert!(!GridError::IdSpaceExhausted.to_string().is_empty());
    }

    // Tests helper constructors fill every field
    // Verified by dropping the value in invalid_parameter
    #[test]
    fn test_helper_constructors() {
        let error = invalid_parameter("position", &"1,2", &"expected three components");
        match &error {
            GridError::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                assert_eq!(*parameter, "position");
                assert_eq!(value, "1,2");
                assert_eq!(reason, "expected three components");
            }
            _ => unreachable!("Expected InvalidParameter error type"),
        }

        let error = computation_error("cell layout", &"shape mismatch");
        assert!(error.to_string().contains("cell layout"));
        assert!(error.to_string().contains("shape mismatch"));
    }
}
