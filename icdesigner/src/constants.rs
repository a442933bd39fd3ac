//! Layout constants shared by components and ICs.

/// Side length of a default component body, in designer units.
pub const DEFAULT_SIZE: f64 = 50.0;

/// Length of the stub between a port's origin and its target.
pub const IO_PORT_LENGTH: f64 = 60.0;

/// Extra width an IC gets per character of its longest port name.
pub const IC_WIDTH_PER_CHAR: f64 = 20.0;

/// Outward offset of the first and last IC ports along the port column.
pub const PORT_NUDGE: f64 = 1.0;

/// Distance used to push a port's direction ray well outside any IC box.
pub const FAR_RAY_DISTANCE: f64 = 10_000.0;

/// Inset subtracted from the half-size when sizing port stubs.
pub const PORT_STUB_INSET: f64 = 25.0;

/// Default wire colour.
pub const DEFAULT_WIRE_COLOR: &str = "#ffffff";
