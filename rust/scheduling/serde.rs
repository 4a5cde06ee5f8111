use crate::json::JSON;
use crate::scheduling::{Cal, DeadlineCheck};

impl JSON for Cal {}
impl JSON for DeadlineCheck {}
