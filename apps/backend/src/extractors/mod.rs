pub mod book_id;
pub mod path_int;
pub mod validated_json;
pub mod year;

pub use book_id::BookId;
pub use validated_json::ValidatedJson;
pub use year::PublicationYear;
