use crate::protocol::error::Result;
use crate::protocol::{Request, Response, StreamEvent};

/// JSON codec for catalog RPC messages.
///
/// Every frame on the wire is the JSON encoding of exactly one protocol
/// message: a [`Request`], a [`Response`], or (on the watch stream) a
/// [`StreamEvent`].
///
/// # Example
///
/// ```
/// use bookshelf_common::transport::JsonCodec;
/// use bookshelf_common::protocol::{Operation, Request};
///
/// let request = Request::new(Operation::List);
/// let encoded = JsonCodec::encode_request(&request).unwrap();
/// let decoded = JsonCodec::decode_request(&encoded).unwrap();
/// assert_eq!(request, decoded);
/// ```
pub struct JsonCodec;

impl JsonCodec {
    pub fn encode_request(request: &Request) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(request)?)
    }

    pub fn decode_request(data: &[u8]) -> Result<Request> {
        Ok(serde_json::from_slice(data)?)
    }

    pub fn encode_response(response: &Response) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(response)?)
    }

    pub fn decode_response(data: &[u8]) -> Result<Response> {
        Ok(serde_json::from_slice(data)?)
    }

    pub fn encode_event(event: &StreamEvent) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(event)?)
    }

    pub fn decode_event(data: &[u8]) -> Result<StreamEvent> {
        Ok(serde_json::from_slice(data)?)
    }
}
