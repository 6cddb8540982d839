// Services layer for business logic
// Services own validation and timestamps, calling storage directly

pub mod event;

pub use event::EventService;
