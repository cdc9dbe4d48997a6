/// Event contracts for chat module wiring.
pub mod events;
/// Domain entities and page transcript state.
pub mod message;
pub mod message_input;
pub mod message_list;
pub mod scroll_manager;
pub mod view;

pub use events::Submit;
pub use message::{Message, MessageId, Role, Transcript};
pub use message_input::MessageInput;
pub use message_list::MessageList;
pub use scroll_manager::ScrollManager;
pub use view::ChatView;
