/// Opaque drawable handle resolved by the host's mesh provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshId {
    Frame,
    Wheel,
    Lamp,
    Blinker,
    Window(WindowPanel),
    Tree,
    Streetlight,
    StreetlightLamp,
    Street,
    Grass,
    Skybox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPanel {
    Front,
    Rear,
    FrontLeft,
    FrontRight,
    RearLeft,
    RearRight,
}

/// Texture binding resolved by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureId {
    Street,
    Grass,
    Tree,
    Streetlight,
    StreetlightLamp,
    Car,
    CarWindow,
    SkyboxDay,
    SkyboxNight,
}
