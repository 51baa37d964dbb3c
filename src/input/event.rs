/// Device-independent input events consumed by the engine. The mapping
/// from key codes and mouse buttons lives in the handler; the engine only
/// ever sees these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    RotateCw,
    RotateCcw,
    Confirm,
}
