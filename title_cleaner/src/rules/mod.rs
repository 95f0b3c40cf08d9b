pub mod brackets;
pub mod dates;
pub mod media;
pub mod placeholders;
pub mod platforms;
pub mod regions;
pub mod release_status;
pub mod whitespace;
