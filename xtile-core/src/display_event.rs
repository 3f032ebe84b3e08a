use super::{models::DesktopId, models::Rect, models::Window, models::WindowHandle, Command};

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayEvent {
    /// A client window appeared, or existed at startup.
    WindowCreate(Window),
    /// Title, desktop, state or decoration of a known window changed.
    WindowChange(Window),
    WindowDestroy(WindowHandle),
    GeometryChange(WindowHandle, Rect),
    FocusChange(Option<WindowHandle>),
    DesktopChange(DesktopId),
    WorkAreaChange(Rect),
    SendCommand(Command),
}
