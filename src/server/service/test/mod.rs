use entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

use crate::server::error::{validation::FieldIssue, AppError};
