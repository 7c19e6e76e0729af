mod activity;

pub use activity::{Activity, ApiMessage, NewActivity};
