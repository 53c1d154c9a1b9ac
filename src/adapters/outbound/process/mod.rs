/// Process adapters wrapping external executables
mod cmp_comparator;
mod inventory_command;

pub use cmp_comparator::CmpComparator;
pub use inventory_command::InventoryCommand;
