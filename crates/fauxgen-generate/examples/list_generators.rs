use fauxgen_generate::GeneratorRegistry;

fn main() {
    let registry = GeneratorRegistry::new();
    for id in registry.generator_ids() {
        let tags = registry
            .generator(id)
            .map(|generator| generator.pii_tags().join(","))
            .unwrap_or_default();
        println!("{id}\t{tags}");
    }
}
