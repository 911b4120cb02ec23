use std::fs;
use std::io::Cursor;

use tabula::table::io::read_columns;
use tabula::table::{ErrorKind, Interpolant, Table, TableError};

type TableResult = Result<(), TableError>;

fn sample(interp: Interpolant) -> Result<Table, TableError> {
    Table::new(&[3.0, 0.0, 1.5, 2.0], &[1.0, -2.0, 0.25, 4.0], interp)
}

#[test]
fn export_round_trip() -> TableResult {
    for interp in Interpolant::ALL {
        let t = sample(interp)?;
        let rebuilt = Table::with_interpolant_name(&t.export_args(), &t.export_vals(), t.export_interpolant())?;
        assert_eq!(rebuilt, t);
        assert_eq!(rebuilt.lookup(1.7)?, t.lookup(1.7)?);
    }
    Ok(())
}

#[test]
fn exports_are_sorted() -> TableResult {
    let t = sample(Interpolant::Linear)?;
    assert_eq!(t.export_args(), vec![0.0, 1.5, 2.0, 3.0]);
    assert_eq!(t.export_vals(), vec![-2.0, 0.25, 4.0, 1.0]);
    assert_eq!(t.export_interpolant(), "linear");
    Ok(())
}

#[test]
fn inequality_on_interpolant_or_samples() -> TableResult {
    assert_ne!(sample(Interpolant::Floor)?, sample(Interpolant::Ceil)?);
    let other = Table::new(&[3.0, 0.0, 1.5, 2.0], &[1.0, -2.0, 0.25, 4.5], Interpolant::Floor)?;
    assert_ne!(sample(Interpolant::Floor)?, other);
    Ok(())
}

#[test]
fn clone_is_equal_and_independent() -> TableResult {
    let t = sample(Interpolant::Spline)?;
    let copy = t.clone();
    drop(t);
    assert_eq!(copy, sample(Interpolant::Spline)?);
    assert!(copy.lookup(2.5)?.is_finite());
    Ok(())
}

#[test]
fn json_round_trip() {
    for interp in Interpolant::ALL {
        let t = sample(interp).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        let back: Table = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
        assert_eq!(back.lookup(0.7).unwrap(), t.lookup(0.7).unwrap());
    }
}

#[test]
fn json_layout() {
    let t = Table::new(&[1.0, 0.0], &[10.0, 5.0], Interpolant::Ceil).unwrap();
    let value = serde_json::to_value(&t).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "args": [0.0, 1.0], "vals": [5.0, 10.0], "interpolant": "ceil" })
    );
}

#[test]
fn json_rejects_unknown_interpolant() {
    let json = r#"{ "args": [0.0, 1.0], "vals": [0.0, 1.0], "interpolant": "cubic" }"#;
    assert!(serde_json::from_str::<Table>(json).is_err());
}

#[test]
fn json_runs_construction_checks() {
    let json = r#"{ "args": [0.0, 0.0], "vals": [0.0, 1.0], "interpolant": "linear" }"#;
    let err = serde_json::from_str::<Table>(json).unwrap_err();
    assert!(err.to_string().contains("duplicate argument"));

    let json = r#"{ "args": [0.0, 1.0, 2.0], "vals": [0.0, 1.0], "interpolant": "linear" }"#;
    assert!(serde_json::from_str::<Table>(json).is_err());
}

#[test]
fn reads_columns_from_text() -> TableResult {
    let text = "# arg val\n0.0 1.0\n\n2.0 3.0\n1.0 2.0\n";
    let (args, vals) = read_columns(Cursor::new(text))?;
    let t = Table::new(&args, &vals, Interpolant::Linear)?;
    assert_eq!(t.args(), &[0.0, 1.0, 2.0]);
    assert_eq!(t.lookup(1.5)?, 2.5);
    Ok(())
}

#[test]
fn loads_table_from_file() -> TableResult {
    crate::init_logger();
    let path = std::env::temp_dir().join(format!("tabula-load-{}.dat", std::process::id()));
    fs::write(&path, "# wavelength throughput\n350 0.0\n400 0.5\n450 1.0\n").unwrap();

    let t = Table::from_file(&path, Interpolant::Linear);
    fs::remove_file(&path).unwrap();
    let t = t?;

    assert_eq!(t.len(), 3);
    assert_eq!(t.arg_min(), 350.0);
    assert_eq!(t.arg_max(), 450.0);
    assert_eq!(t.lookup(425.0)?, 0.75);
    Ok(())
}

#[test]
fn missing_file_is_input_error() {
    let path = std::env::temp_dir().join("tabula-definitely-missing.dat");
    let err = Table::from_file(&path, Interpolant::Spline).unwrap_err();
    assert!(matches!(err, TableError::Io { .. }));
    assert_eq!(err.kind(), ErrorKind::Input);
}

#[test]
fn empty_file_is_construction_error() {
    let path = std::env::temp_dir().join(format!("tabula-empty-{}.dat", std::process::id()));
    fs::write(&path, "# nothing here\n").unwrap();

    let err = Table::from_file(&path, Interpolant::Linear).unwrap_err();
    fs::remove_file(&path).unwrap();
    assert!(matches!(err, TableError::EmptyInput));
}
