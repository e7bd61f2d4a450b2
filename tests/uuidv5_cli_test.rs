use anyhow::Result;
use std::process::Command;

const UUIDV5: &str = env!("CARGO_BIN_EXE_uuidv5");

fn run_uuidv5(args: &[&str]) -> Result<(Option<i32>, String, String)> {
    let output = Command::new(UUIDV5).args(args).env_remove("RUST_LOG").output()?;
    Ok((
        output.status.code(),
        String::from_utf8_lossy(&output.stdout).trim().to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    ))
}

#[test]
fn test_derives_pinned_uuid() -> Result<()> {
    let (code, stdout, _) = run_uuidv5(&["example", "6ba7b810-9dad-11d1-80b4-00c04fd430c8"])?;

    assert_eq!(code, Some(0));
    assert_eq!(stdout, "7cb48787-6d91-5b9f-bc60-f30298ea5736");
    Ok(())
}

#[test]
fn test_alias_matches_explicit_namespace() -> Result<()> {
    let (_, via_alias, _) = run_uuidv5(&["example", "dns"])?;
    let (_, explicit, _) = run_uuidv5(&["example", "6ba7b810-9dad-11d1-80b4-00c04fd430c8"])?;

    assert_eq!(via_alias, explicit);
    Ok(())
}

#[test]
fn test_library_and_cli_agree() -> Result<()> {
    let namespace = "6ba7b811-9dad-11d1-80b4-00c04fd430c8";
    let (_, stdout, _) = run_uuidv5(&["web-01", namespace])?;

    assert_eq!(stdout, infra_helpers::uuidv5("web-01", namespace)?);
    Ok(())
}

#[test]
fn test_name_starting_with_hyphen() -> Result<()> {
    let (code, stdout, _) = run_uuidv5(&["-web", "dns"])?;

    assert_eq!(code, Some(0));
    assert_eq!(stdout, infra_helpers::uuidv5("-web", "6ba7b810-9dad-11d1-80b4-00c04fd430c8")?);
    Ok(())
}

#[test]
fn test_verbose_keeps_stdout_clean() -> Result<()> {
    let (code, stdout, stderr) = run_uuidv5(&["example", "dns", "-v"])?;

    assert_eq!(code, Some(0));
    assert_eq!(stdout, "7cb48787-6d91-5b9f-bc60-f30298ea5736");
    assert!(stderr.contains("derived uuidv5"));
    Ok(())
}

#[test]
fn test_invalid_namespace_exits_with_failure() -> Result<()> {
    let (code, stdout, stderr) = run_uuidv5(&["example", "not-a-uuid"])?;

    assert_eq!(code, Some(1));
    assert!(stdout.is_empty());
    assert!(stderr.contains("not-a-uuid"));
    Ok(())
}
