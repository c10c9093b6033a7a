// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Plain in-process domain objects. No storage, no I/O: an embedding
// application owns persistence, payment gateways and presentation.
//
// ============================================================================

pub mod order;
