// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

mod alter;

pub use alter::{AlterTableChange, AlterTablePlan, ColumnToAdd, ConstraintToAdd};
