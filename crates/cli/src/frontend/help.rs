use checksums::DigestRegistry;
use engine::DisplayFormat;

/// Version reported by `--version` and `--info`.
pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

pub(crate) fn usage_line(program_name: &str) -> String {
    format!("Usage: {program_name} [OPTIONS] PATH...")
}

/// Renders `--help` output for `program_name`.
pub(crate) fn help_text(program_name: &str, registry: &DigestRegistry) -> String {
    let digests: Vec<_> = registry.identifiers().collect();
    let formats: Vec<_> = DisplayFormat::ALL.iter().map(|format| format.as_str()).collect();

    let mut text = String::new();
    text.push_str(&format!("integrity version {VERSION}\n\n"));
    text.push_str(
        "Stores a checksum of each file's content in an extended attribute and\n\
         later verifies the content against it.\n\n",
    );
    text.push_str(&usage_line(program_name));
    text.push_str("\n\nActions (default --check):\n");
    for (flags, help) in [
        ("-c, --check", "Check stored checksums against file content."),
        ("-a, --add", "Calculate checksums and store them."),
        ("-d, --delete", "Delete stored checksums."),
        ("-l, --list", "List stored checksums."),
        ("    --fix-old", "Rename attributes written by older releases."),
    ] {
        text.push_str(&format!("  {flags:<24}{help}\n"));
    }
    text.push_str("\nOptions:\n");
    for (flags, help) in [
        ("-x, --all", "Use every known digest."),
        ("    --digest LIST", "Comma separated digests (default sha1)."),
        ("-f, --force", "Store checksums even when one exists."),
        ("-r, --recursive", "Recurse into directories."),
        ("-s, --short-paths", "Show file names instead of full paths."),
        ("    --display-format FMT", "List as FMT; implies --list."),
        ("-v, --verbose", "Output more information."),
        ("-q, --quiet", "Output only failures."),
        ("    --loglevel LEVEL", "Diagnostic log level (default info)."),
        ("    --info", "Show configuration and exit."),
        ("    --version", "Show version and exit."),
        ("-h, --help", "Show this help and exit."),
    ] {
        text.push_str(&format!("  {flags:<24}{help}\n"));
    }
    text.push_str(&format!("\nDigests: {}\n", digests.join(", ")));
    text.push_str(&format!("Display formats: {}\n", formats.join(", ")));
    text.push_str(
        "\nThe digest is taken from the program name (e.g. integrity.sha256), then\n\
         --all, then --digest, then the INTEGRITY_DIGEST environment variable.\n",
    );
    text
}
