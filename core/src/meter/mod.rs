pub mod history;
pub mod reading;

pub use history::History;
pub use reading::Reading;
