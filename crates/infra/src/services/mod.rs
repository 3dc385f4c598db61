pub mod messaging;
pub mod notify;

pub use messaging::{
    ChannelSessionSink, IHearingMessagingService, ISessionSink, MessagingServiceFactory,
    NoOpMessagingService, SessionAwareMessagingService, SessionMessage,
};
pub use notify::SecondaryNotificationClient;
