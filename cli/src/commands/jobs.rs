//! Job commands: list, show, add, edit, delete.

use std::io::{self, Write};

use log::debug;

use jobdeck_cli::{CLIError, OutputFormatter, Result};
use jobdeck_link::{FileStorage, Job, JobBoard, JobDraft, LinkError, Session};

/// Mutating commands check the role up front so a non-admin gets a notice
/// without any network traffic.
fn ensure_admin(session: Option<&Session>) -> Result<()> {
    match session {
        Some(session) if session.is_admin() => Ok(()),
        Some(_) => Err(LinkError::AuthorizationError(
            "only admins can modify job postings".into(),
        )
        .into()),
        None => Err(LinkError::AuthorizationError(
            "sign in as an admin to modify job postings".into(),
        )
        .into()),
    }
}

pub async fn list(
    mut board: JobBoard<FileStorage>,
    search: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    debug!("[CLI] Refreshing job listings");
    board.refresh().await?;

    let output = match search {
        Some(term) => {
            let matches: Vec<Job> = board.filter(term).into_iter().cloned().collect();
            formatter.format_jobs(&matches)?
        }
        None => formatter.format_jobs(board.jobs())?,
    };
    println!("{}", output.trim_end_matches('\n'));
    Ok(())
}

pub async fn show(
    board: JobBoard<FileStorage>,
    id: &str,
    formatter: &OutputFormatter,
) -> Result<()> {
    debug!("[CLI] Fetching job {}", id);
    match board.get_by_id(id).await? {
        Some(job) => println!("{}", formatter.format_job(&job)?.trim_end_matches('\n')),
        None => println!("No job found with id {}", id),
    }
    Ok(())
}

pub async fn add(
    mut board: JobBoard<FileStorage>,
    session: Option<&Session>,
    title: String,
    company: String,
    description: String,
) -> Result<()> {
    ensure_admin(session)?;

    let draft = JobDraft::new(title, company, description);
    debug!("[CLI] Creating job \"{}\"", draft.title);
    let job = board.create(&draft).await?;
    println!("Job \"{}\" created (id {})", job.title, job.id);
    Ok(())
}

pub async fn edit(
    mut board: JobBoard<FileStorage>,
    session: Option<&Session>,
    id: &str,
    title: Option<String>,
    company: Option<String>,
    description: Option<String>,
) -> Result<()> {
    ensure_admin(session)?;

    if title.is_none() && company.is_none() && description.is_none() {
        return Err(CLIError::InputError(
            "nothing to change: pass --title, --company or --description".into(),
        ));
    }

    // The update replaces all three editable fields; fill the omitted ones
    // from the current record.
    let current = board
        .get_by_id(id)
        .await?
        .ok_or_else(|| CLIError::InputError(format!("no job found with id {}", id)))?;

    let draft = JobDraft::new(
        title.unwrap_or(current.title),
        company.unwrap_or(current.company),
        description.unwrap_or(current.description),
    );
    debug!("[CLI] Updating job {}", id);
    let job = board.update(id, &draft).await?;
    println!("Job \"{}\" updated", job.title);
    Ok(())
}

pub async fn delete(
    mut board: JobBoard<FileStorage>,
    session: Option<&Session>,
    id: &str,
    yes: bool,
) -> Result<()> {
    ensure_admin(session)?;

    if !yes {
        print!("Delete job {}? [y/N] ", id);
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let answer = input.trim().to_lowercase();
        if answer != "y" && answer != "yes" {
            return Err(CLIError::Cancelled);
        }
    }

    debug!("[CLI] Deleting job {}", id);
    board.delete(id).await?;
    println!("Job {} deleted", id);
    Ok(())
}
