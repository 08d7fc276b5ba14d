use std::fs;

fn main() {
    // Validate default config at compile time
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");

    let config = match content.parse::<toml::Table>() {
        Ok(config) => config,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    // Every [page] key is required here; it is the only source of defaults
    let page = config.get("page").expect("default_config.toml is missing [page]");
    let template = page
        .get("template")
        .and_then(|template| template.as_str())
        .expect("default_config.toml is missing [page].template");
    page.get("base_path")
        .and_then(|base_path| base_path.as_str())
        .expect("default_config.toml is missing [page].base_path");

    // The page template must carry both placeholders
    for placeholder in ["{{ Title }}", "{{ Content }}"] {
        if !template.contains(placeholder) {
            panic!("default page template is missing {}", placeholder);
        }
    }
}
