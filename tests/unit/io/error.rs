//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use mazebuilder::MazeError;
    use mazebuilder::io::error::{file_system, invalid_parameter};
    use mazebuilder::spatial::Cell;
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = file_system("/tmp/maze.csv", "write csv", io_error);

        assert!(error.source().is_some());
        assert!(error.to_string().contains("write csv"));
        assert!(error.to_string().contains("/tmp/maze.csv"));
    }

    #[test]
    fn test_csv_export_keeps_source() {
        let error = MazeError::CsvExport {
            path: "/tmp/timings.csv".into(),
            source: csv::Error::from(std::io::Error::other("disk full")),
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/timings.csv"));
        assert!(error.to_string().contains("disk full"));
    }

    // Tests InvalidDimension names the dimension and value
    #[test]
    fn test_invalid_dimension_message() {
        let error = MazeError::InvalidDimension {
            dimension: "width",
            value: "-3".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("width"));
        assert!(message.contains("-3"));
        assert!(error.source().is_none());
    }

    // Tests carve errors render cell coordinates
    // Verified by omitting the cells from the message
    #[test]
    fn test_carve_error_messages() {
        let not_adjacent = MazeError::NotAdjacent {
            from: Cell::new(0, 0),
            to: Cell::new(2, 2),
        };
        assert!(not_adjacent.to_string().contains("(0, 0)"));
        assert!(not_adjacent.to_string().contains("(2, 2)"));

        let out_of_bounds = MazeError::OutOfBounds {
            cell: Cell::new(4, 1),
            dimensions: (3, 5),
        };
        assert!(out_of_bounds.to_string().contains("(4, 1)"));
        assert!(out_of_bounds.to_string().contains("3x5"));
    }

    #[test]
    fn test_worker_panicked_message() {
        let error = MazeError::WorkerPanicked { partition: 2 };
        assert!(error.to_string().contains("partition 2"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("edge_width", &1, &"must be at least 2");

        let message = error.to_string();
        assert!(message.contains("edge_width"));
        assert!(message.contains("= '1'"));
        assert!(message.contains("must be at least 2"));
    }
}
