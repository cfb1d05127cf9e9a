// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::records_to_string;
use crate::model::CourseAttendanceRecord;

/// Write the course list to the file `export.out_path()` names.
/// Returns the final path written to.
pub fn write_export(export: &ExportOptions, records: &[CourseAttendanceRecord]) -> io::Result<PathBuf> {
    let path = export.out_path();
    ensure_parent(&path)?;

    let contents = records_to_string(records, export.include_headers, export.format.delim());
    let mut out = BufWriter::new(File::create(&path)?);
    out.write_all(contents.as_bytes())?;
    out.flush()?;
    Ok(path)
}

pub fn ensure_parent(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory(parent),
        _ => Ok(()),
    }
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    fs::create_dir_all(dir)
}

/// Replace `path` by writing a sibling temp file and renaming it over.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    ensure_parent(path)?;
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::ExportFormat;

    #[test]
    fn export_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let mut export = ExportOptions::default();
        export.format = ExportFormat::Tsv;
        export.set_path(&format!("{}/nested/", dir.path().display()));

        let records = vec![CourseAttendanceRecord {
            course: s!("Math"),
            classes_held: 10,
            classes_present: 9,
            classes_absent: 1,
            percentage: s!("90"),
        }];
        let path = write_export(&export, &records).unwrap();
        assert!(path.ends_with("nested/attendance.tsv"));
        let text = fs::read_to_string(path).unwrap();
        assert_eq!(text, "Course\tHeld\tPresent\tAbsent\tPercentage\nMath\t10\t9\t1\t90\n");
    }

    #[test]
    fn atomic_write_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("a.csv");
        write_atomic(&p, "one\n").unwrap();
        write_atomic(&p, "two\n").unwrap();
        assert_eq!(fs::read_to_string(&p).unwrap(), "two\n");
        assert!(!dir.path().join("a.csv.tmp").exists());
    }

    #[test]
    fn file_in_place_of_directory_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let f = dir.path().join("taken");
        fs::write(&f, "x").unwrap();
        assert!(ensure_directory(&f).is_err());
    }
}
