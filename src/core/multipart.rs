//! Hand-rolled `multipart/form-data` encoder. The backend expects the exact
//! part layout produced here, so the body is built byte by byte instead of
//! going through reqwest's multipart support.
//!
//! Field values are not escaped against boundary collisions; the random UUID
//! boundary makes a collision with real content practically impossible.

use uuid::Uuid;

const CRLF: &str = "\r\n";

pub struct MultipartForm {
    boundary: String,
    body: Vec<u8>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self {
            boundary: Uuid::new_v4().to_string(),
            body: Vec::new(),
        }
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// The `Content-Type` header value matching this form's boundary.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Append a text part. Parts appear in the body in insertion order.
    pub fn append_field(&mut self, name: &str, value: &str) {
        let header = format!(
            "--{}{CRLF}Content-Disposition: form-data; name=\"{name}\"{CRLF}{CRLF}",
            self.boundary
        );
        self.body.extend_from_slice(header.as_bytes());
        self.body.extend_from_slice(value.as_bytes());
        self.body.extend_from_slice(CRLF.as_bytes());
    }

    /// Append a binary part carrying both a field name and a filename, with an
    /// explicit per-part `Content-Type`.
    pub fn append_file(&mut self, name: &str, filename: &str, bytes: &[u8], mime_type: &str) {
        let header = format!(
            "--{}{CRLF}Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"{CRLF}Content-Type: {mime_type}{CRLF}{CRLF}",
            self.boundary
        );
        self.body.extend_from_slice(header.as_bytes());
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(CRLF.as_bytes());
    }

    /// Finalize the body by appending the closing delimiter. Consumes the form
    /// so the terminator can never be written twice.
    pub fn build(mut self) -> Vec<u8> {
        let closing = format!("--{}--{CRLF}", self.boundary);
        self.body.extend_from_slice(closing.as_bytes());
        self.body
    }
}

impl Default for MultipartForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_fields_round_trip_in_insertion_order() {
        let mut form = MultipartForm::new();
        form.append_field("number", "A1");
        form.append_field("description", "desc");
        let boundary = form.boundary().to_string();
        let body = String::from_utf8(form.build()).unwrap();

        let expected = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"number\"\r\n\r\nA1\r\n\
             --{boundary}\r\nContent-Disposition: form-data; name=\"description\"\r\n\r\ndesc\r\n\
             --{boundary}--\r\n"
        );
        assert_eq!(body, expected);
    }

    #[test]
    fn file_part_preserves_bytes_mime_and_filename() {
        let payload = vec![0u8, 1, 2, 255, 254, 7];
        let mut form = MultipartForm::new();
        form.append_file("photo", "image.jpg", &payload, "image/jpeg");
        let boundary = form.boundary().to_string();
        let body = form.build();

        let header = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"photo\"; filename=\"image.jpg\"\r\nContent-Type: image/jpeg\r\n\r\n"
        );
        assert!(body.starts_with(header.as_bytes()));

        let rest = &body[header.len()..];
        assert_eq!(&rest[..payload.len()], payload.as_slice());

        let tail = format!("\r\n--{boundary}--\r\n");
        assert_eq!(&rest[payload.len()..], tail.as_bytes());
    }

    #[test]
    fn empty_form_is_just_the_closing_delimiter() {
        let form = MultipartForm::new();
        let boundary = form.boundary().to_string();
        let body = String::from_utf8(form.build()).unwrap();
        assert_eq!(body, format!("--{boundary}--\r\n"));
    }

    #[test]
    fn each_form_gets_a_fresh_boundary() {
        let a = MultipartForm::new();
        let b = MultipartForm::new();
        assert_ne!(a.boundary(), b.boundary());
    }

    #[test]
    fn content_type_names_the_boundary() {
        let form = MultipartForm::new();
        assert_eq!(
            form.content_type(),
            format!("multipart/form-data; boundary={}", form.boundary())
        );
    }
}
