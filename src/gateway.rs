pub mod clients;
pub mod factory;
pub mod http;
pub mod sns;

use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum NotifierVia {
    Sns,
    Http,
}

// CreationNotice is the message body sent to the mail service when a book is added
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreationNotice {
    pub email: String,
    pub book: BookDto,
}

impl CreationNotice {
    pub fn new(recipient: &str, book: &BookDto) -> Self {
        Self {
            email: recipient.to_string(),
            book: book.clone(),
        }
    }
}
