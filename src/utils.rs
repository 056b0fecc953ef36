use std::collections::HashSet;
use std::path::{Component, Path};

pub fn ensure_directory_exists(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

pub fn sanitize_filename(filename: &str) -> String {
    filename.replace(|c: char| !c.is_ascii_alphanumeric(), "_")
}

/// Report name from the resume's path below `root`, extension dropped:
/// `root/2024/Jane Doe.pdf` -> `2024_Jane_Doe_feedback.txt`
pub fn report_file_name(root: &Path, resume: &Path) -> String {
    let relative = resume.strip_prefix(root).unwrap_or(resume).with_extension("");
    let stem = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("_");
    let stem = if stem.is_empty() { "resume".to_string() } else { stem };
    format!("{}_feedback.txt", sanitize_filename(&stem))
}

/// One report name per resume, in input order. Paths that sanitize to the
/// same name get `_2`, `_3`, ... so no report overwrites another.
pub fn report_file_names<P: AsRef<Path>>(root: &Path, resumes: &[P]) -> Vec<String> {
    let mut taken = HashSet::new();
    resumes
        .iter()
        .map(|resume| {
            let base = report_file_name(root, resume.as_ref());
            let mut name = base.clone();
            let mut n = 2;
            while !taken.insert(name.clone()) {
                name = base.replacen("_feedback.txt", &format!("_{n}_feedback.txt"), 1);
                n += 1;
            }
            name
        })
        .collect()
}
