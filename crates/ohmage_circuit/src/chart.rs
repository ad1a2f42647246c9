use std::io;

pub const CHART_TITLE: &str = "Voltage across Circuit Components";
pub const X_AXIS_LABEL: &str = "Component";
pub const Y_AXIS_LABEL: &str = "Voltage (V)";

/// Rendering collaborator for per-component voltages. The computation core
/// never invokes a sink itself; it exposes the ordered (label, voltage)
/// pairs and the caller hands them to whichever sink it wants.
pub trait ChartSink {
    fn render(&mut self, voltages: &[(String, f64)]) -> io::Result<()>;
}
