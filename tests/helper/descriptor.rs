//! Descriptor fixtures on disk

use std::path::Path;

use component_updater::config::DESCRIPTOR_FILE_NAME;

/// Write `content` as the descriptor of `dir`, creating the directory
pub fn write_descriptor(dir: &Path, content: &str) {
    std::fs::create_dir_all(dir).unwrap();
    std::fs::write(dir.join(DESCRIPTOR_FILE_NAME), content).unwrap();
}

pub fn read_descriptor(dir: &Path) -> String {
    std::fs::read_to_string(dir.join(DESCRIPTOR_FILE_NAME)).unwrap()
}

/// A descriptor named `name` at `version` with one git source per `(repo_url, version)`
pub fn descriptor_yaml(name: &str, version: &str, sources: &[(&str, &str)]) -> String {
    let mut yaml = format!(
        "meta:\n  schemaVersion: v2\ncomponent:\n  name: {name}\n  version: {version}\n  provider: internal\n"
    );
    if sources.is_empty() {
        yaml.push_str("  sources: []\n");
        return yaml;
    }
    yaml.push_str("  sources:\n");
    for (repo_url, source_version) in sources {
        let source_name = repo_url.rsplit('/').next().unwrap_or(repo_url);
        yaml.push_str(&format!(
            "  - name: {source_name}\n    type: git\n    version: {source_version}\n    access:\n      type: github\n      repoUrl: {repo_url}\n      ref: refs/tags/{source_version}\n"
        ));
    }
    yaml
}
