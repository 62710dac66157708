use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

use crate::server::error::AppError;
