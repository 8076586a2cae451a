//! Tests for strip planning and boundary edges

#[cfg(test)]
mod tests {
    use mazebuilder::spatial::{Cell, Partition, PartitionPlan, SplitAxis};

    // Tests strips run along the longer dimension
    // Verified by inverting the axis comparison
    #[test]
    fn test_axis_follows_longer_dimension() {
        assert_eq!(PartitionPlan::new(10, 40, 4).axis(), SplitAxis::Columns);
        assert_eq!(PartitionPlan::new(40, 10, 4).axis(), SplitAxis::Rows);
        assert_eq!(PartitionPlan::new(8, 8, 2).axis(), SplitAxis::Columns);
    }

    // Tests sizes differ by at most one and sum to the extent
    #[test]
    fn test_sizes_are_balanced() {
        let plan = PartitionPlan::new(5, 11, 4);
        assert_eq!(plan.sizes(), &[3, 3, 3, 2]);
        assert_eq!(plan.sizes().iter().sum::<usize>(), 11);
    }

    // Tests the strip count is clamped to the number of lines
    // Verified by removing the upper clamp
    #[test]
    fn test_surplus_workers_are_idle() {
        let plan = PartitionPlan::new(3, 3, 8);
        assert_eq!(plan.len(), 3);
        assert!(plan.sizes().iter().all(|&size| size == 1));
    }

    #[test]
    fn test_zero_workers_means_one_strip() {
        let plan = PartitionPlan::new(4, 6, 0);
        assert_eq!(plan.len(), 1);
        assert!(!plan.is_empty());
        assert!(plan.boundaries().is_empty());
    }

    // Tests strips cover every cell exactly once
    #[test]
    fn test_partitions_cover_grid_disjointly() {
        let plan = PartitionPlan::new(7, 9, 4);
        let partitions = plan.partitions();
        assert_eq!(
            partitions.iter().map(Partition::cell_count).sum::<usize>(),
            63
        );

        for row in 0..7 {
            for col in 0..9 {
                let cell = Cell::new(row, col);
                let owners = partitions
                    .iter()
                    .filter(|p| p.rows.contains(&row) && p.cols.contains(&col))
                    .count();
                assert_eq!(owners, 1, "cell {cell} owned by {owners} strips");
            }
        }
    }

    // Tests boundary edges join the last line of one strip to the first of the next
    // Verified by returning the later cell first
    #[test]
    fn test_boundary_edges_for_columns() {
        let plan = PartitionPlan::new(3, 6, 2);
        let boundaries = plan.boundaries();
        assert_eq!(boundaries.len(), 1);

        let boundary = boundaries.first().expect("one boundary");
        assert_eq!(boundary.index, 0);
        assert_eq!(boundary.offset, 3);
        assert_eq!(boundary.span, 3);
        assert_eq!(boundary.edge(1), (Cell::new(1, 2), Cell::new(1, 3)));
    }

    #[test]
    fn test_boundary_edges_for_rows() {
        let plan = PartitionPlan::new(9, 4, 3);
        let boundaries = plan.boundaries();
        assert_eq!(
            boundaries.iter().map(|b| b.offset).collect::<Vec<_>>(),
            vec![3, 6]
        );

        let last = boundaries.last().expect("two boundaries");
        assert_eq!(last.index, 1);
        assert_eq!(last.span, 4);
        assert_eq!(last.edge(0), (Cell::new(5, 0), Cell::new(6, 0)));
    }
}
