use crate::server::{
    error::AppError, model::document::CreateDocumentParam, service::document::DocumentService,
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
