/// Use cases module containing application business logic orchestration
mod resolve_candidate;
mod take_snapshot;

pub use resolve_candidate::ResolveCandidateUseCase;
pub use take_snapshot::TakeSnapshotUseCase;
