use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

use crate::server::util::object_id::is_valid_id;

mod recommended_website;
mod suggestion_type;
