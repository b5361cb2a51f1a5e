use crate::server::{data::token::TokenStore, error::token::TokenStoreError};
use test_utils::fixture::token_file::TokenFile;

mod load;
