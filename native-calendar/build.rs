use rustc_version::{version_meta, Channel};

/// Build channels exposed as `cfg` flags to the library.
const CHANNELS: [(Channel, &str); 4] = [
    (Channel::Stable, "CHANNEL_STABLE"),
    (Channel::Beta, "CHANNEL_BETA"),
    (Channel::Nightly, "CHANNEL_NIGHTLY"),
    (Channel::Dev, "CHANNEL_DEV"),
];

fn detect_build_channel() -> Result<(), rustc_version::Error> {
    let channel = version_meta()?.channel;

    for (candidate, name) in CHANNELS {
        println!("cargo::rustc-check-cfg=cfg({name})");

        if candidate == channel {
            println!("cargo::rustc-cfg={name}");
        }
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    detect_build_channel()?;
    println!("cargo::rerun-if-changed=native-calendar/build.rs");
    Ok(())
}
