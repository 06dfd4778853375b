pub mod api_json;
pub mod db_connection;
