//! Response decoding strategies.
//!
//! A [`ResponseFormat`] turns a response that already passed the status gate
//! into the operation's output.

use crate::error::{ClientError, Result};
use crate::strapping::StrappingTable;
use reqwest::blocking::Response;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

pub(crate) trait ResponseFormat {
    type Output;

    fn decode(operation: &str, response: Response) -> Result<Self::Output>;
}

/// JSON body deserialized into `T`.
pub(crate) struct Json<T>(PhantomData<T>);

impl<T: DeserializeOwned> ResponseFormat for Json<T> {
    type Output = T;

    fn decode(operation: &str, response: Response) -> Result<T> {
        let bytes = read_body(operation, response)?;
        serde_json::from_slice(&bytes).map_err(|source| ClientError::Decode {
            operation: operation.to_string(),
            source,
        })
    }
}

/// Body is ignored.
pub(crate) struct NoContent;

impl ResponseFormat for NoContent {
    type Output = ();

    fn decode(_operation: &str, _response: Response) -> Result<()> {
        Ok(())
    }
}

/// Two-column CSV strapping table.
pub(crate) struct Strapping;

impl ResponseFormat for Strapping {
    type Output = StrappingTable;

    fn decode(operation: &str, response: Response) -> Result<StrappingTable> {
        let bytes = read_body(operation, response)?;
        let text = String::from_utf8(bytes).map_err(|e| ClientError::InvalidResponse {
            operation: operation.to_string(),
            message: format!("body is not UTF-8: {e}"),
        })?;

        StrappingTable::parse(&text).map_err(|message| ClientError::InvalidResponse {
            operation: operation.to_string(),
            message,
        })
    }
}

fn read_body(operation: &str, response: Response) -> Result<Vec<u8>> {
    response
        .bytes()
        .map(|b| b.to_vec())
        .map_err(|source| ClientError::Transport {
            operation: operation.to_string(),
            source,
        })
}
