use fieldspec::generate;

fn main() {
    let spec = "\
id required string
username optional string
enabled optional boolean
attributes optional Map
groups optional < GroupRepresentation
";

    match generate(spec, "UserRepresentation.spec", "UserRepresentation") {
        Ok(generation) => {
            println!("{}", generation.to_source());
        }
        Err(e) => {
            eprintln!("Failed to compile spec: {e:?}");
        }
    }
}
