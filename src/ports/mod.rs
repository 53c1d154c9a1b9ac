/// Ports module defining interfaces for hexagonal architecture
///
/// The application core drives everything itself (one run per invocation),
/// so only outbound (driven) ports exist.
pub mod outbound;
