
pub use app::{get_json_body, make_test_app};
