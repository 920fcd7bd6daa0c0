/// Use cases module containing application business logic orchestration
mod find_dependants;

pub use find_dependants::FindDependantsUseCase;
