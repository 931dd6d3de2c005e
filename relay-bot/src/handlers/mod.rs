mod reply;

pub use reply::ReplyHandler;
