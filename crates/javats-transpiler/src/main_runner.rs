//! Entry-point runner appended to compiled output.

/// Snippet invoking `<class>.main` when the module is the program entry.
#[must_use]
pub fn main_runner(class_name: &str) -> String {
    format!(
        "\nif (typeof require !== 'undefined' && require.main === module) {{\n    {class_name}.main(process.argv.slice(2));\n}}"
    )
}

/// Appends the entry runner for `class_name` to compiled JavaScript.
#[must_use]
pub fn append_main_runner(js: &str, class_name: &str) -> String {
    format!("{}\n{}", js.trim_end(), main_runner(class_name))
}
