use crate::result::CommonResult;
use stackblocks_model::{EditorState, Value};
use std::path::Path;

/// Read an editor snapshot (`{scope, tree}`) from a JSON file
pub fn read_state(path: &Path) -> CommonResult<EditorState> {
    let content = std::fs::read_to_string(path)?;
    let state = EditorState::from_json(&content)?;
    if !matches!(state.scope, Value::Object(_)) {
        return Err(format!("{}: scope must be a JSON object", path.display()).into());
    }
    Ok(state)
}

/// Write an editor snapshot as pretty JSON
pub fn write_state(path: &Path, state: &EditorState) -> CommonResult<()> {
    std::fs::write(path, state.to_json_pretty()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CommonError;
    use stackblocks_model::{Node, TextArgs, Value, View};

    #[test]
    fn test_write_then_read() {
        let dir = std::env::temp_dir().join(format!("stackblocks-snapshot-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("state.json");

        let state = EditorState::new(
            Value::object(),
            vec![Node::view(
                "a",
                View::Text(TextArgs {
                    value: "Text".to_string(),
                }),
            )],
        );
        write_state(&path, &state).unwrap();
        assert_eq!(read_state(&path).unwrap(), state);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_non_object_scope_is_rejected() {
        let dir = std::env::temp_dir().join(format!("stackblocks-scope-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("state.json");
        std::fs::write(&path, r#"{ "scope": [1, 2], "tree": [] }"#).unwrap();

        let err = read_state(&path).unwrap_err();
        assert!(matches!(err, CommonError::Generic(_)));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_state(Path::new("/nonexistent/stackblocks/state.json")).unwrap_err();
        assert!(matches!(err, CommonError::Io(_)));
    }
}
