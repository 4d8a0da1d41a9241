use std::io::{BufRead, Write};

use crate::error::CatalogError;
use crate::modules::database::crud::DatabaseAdmin;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseOutcome {
    Dropped,
    Cancelled,
}

/// Only "yes" in any letter case confirms. The line terminator is stripped,
/// nothing else, so " yes" and "y" both cancel.
pub fn is_confirmed(answer: &str) -> bool {
    answer
        .trim_end_matches(['\r', '\n'])
        .eq_ignore_ascii_case("yes")
}

/// Ask once on `output`, read one line from `input`, and drop the whole
/// database only if the operator confirmed.
pub async fn erase_database<A, R, W>(
    admin: &A,
    mut input: R,
    mut output: W,
) -> Result<EraseOutcome, CatalogError>
where
    A: DatabaseAdmin,
    R: BufRead,
    W: Write,
{
    let name = admin.database_name().to_string();

    write!(
        output,
        "Are you sure you want to DELETE the entire database '{}'? (yes/no): ",
        name
    )?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    if !is_confirmed(&answer) {
        tracing::warn!(database = %name, "Drop cancelled by operator");
        writeln!(output, "❌ Cancelled, database '{}' NOT deleted.", name)?;
        return Ok(EraseOutcome::Cancelled);
    }

    tracing::info!(database = %name, "Dropping database");
    admin
        .drop_database()
        .await
        .map_err(|source| CatalogError::Drop {
            database: name.clone(),
            source,
        })?;

    writeln!(output, "🔥 Database '{}' deleted successfully!", name)?;
    Ok(EraseOutcome::Dropped)
}
