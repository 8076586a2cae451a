/// Hunt-and-kill spanning tree generator
pub mod hunt_and_kill;
/// Parallel strip generation and stitching
pub mod partitioned;
/// Seeded random source with child derivation
pub mod random;
/// Algorithm interface, selection and whole-grid generation
pub mod spanning_tree;
/// Visited-cell bitset for generation runs
pub mod visited;
/// Wilson's loop-erased random walk generator
pub mod wilson;

pub use hunt_and_kill::HuntAndCarve;
pub use partitioned::{PartitionReport, PartitionedGenerator, StitchPolicy};
pub use random::{RandomSource, Seed, entropy_seed};
pub use spanning_tree::{Algorithm, SpanningTreeAlgorithm, generate};
pub use visited::VisitedSet;
pub use wilson::LoopErasedWalk;
