pub mod crash_log;
pub mod log;
pub mod singleton;

#[must_use]
pub const fn get_help_template() -> &'static str {
    "\
{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}
"
}

#[must_use]
pub fn is_program_in_path(program: &str) -> bool {
    std::env::var_os("PATH").is_some_and(|path| {
        std::env::split_paths(&path).any(|dir| std::fs::metadata(dir.join(program)).is_ok())
    })
}
