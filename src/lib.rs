pub mod chess;
pub(crate) mod error;
pub(crate) mod server;

#[allow(unused)]
pub mod prelude
{
    pub use std::str::FromStr;

    pub use log::{self};

    pub use crate::{
        chess::*,
        error::{Error, Kind, Result},
        server::{Server, ServerOptions},
    };
}
