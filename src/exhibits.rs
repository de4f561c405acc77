use gallery_core::FrameSpec;
use glam::Vec3;
use std::f32::consts::PI;

// Side walls are turned towards the centre of the hall.
const SIDE_YAW: f32 = PI / 2.5;

struct Exhibit {
    url: &'static str,
    position: [f32; 3],
    yaw: f32,
    label: &'static str,
}

const HALL: [Exhibit; 9] = [
    Exhibit {
        url: "https://raw.githubusercontent.com/earlsnoozd/assets-cpar/main/BAQUIRAN%20(GROUP%20ASSEMBLAGE).jpg",
        position: [0.0, 0.0, 1.5],
        yaw: 0.0,
        label: "sonny-angel\nbaquiran's-group\nle-assemblage\nC5009",
    },
    Exhibit {
        url: "https://raw.githubusercontent.com/KUROSUPARKER/asset-cparmuseum/refs/heads/main/Add%20a%20heading%20(1).png",
        position: [-0.8, 0.0, -0.6],
        yaw: 0.0,
        label: "on-time-for-tomorrow\nbaquiran\nmobile-photography\nA1001",
    },
    Exhibit {
        url: "https://raw.githubusercontent.com/KUROSUPARKER/asset-cparmuseum/refs/heads/main/MUYARGAS.jpg",
        position: [0.8, 0.0, -0.6],
        yaw: 0.0,
        label: "-untitled-\nmuyargas\ncoffee-painting\nB2002",
    },
    Exhibit {
        url: "https://raw.githubusercontent.com/KUROSUPARKER/asset-cparmuseum/refs/heads/main/marga.png",
        position: [-1.75, 0.0, 0.25],
        yaw: SIDE_YAW,
        label: "-untitled-\ndolera\ncoffee-painting\nC3003",
    },
    Exhibit {
        url: "https://raw.githubusercontent.com/KUROSUPARKER/asset-cparmuseum/refs/heads/main/DIMAANO.jpg",
        position: [-2.15, 0.0, 1.5],
        yaw: SIDE_YAW,
        label: "-unlabeled-\ndimaano\ncoffee-painting\nD4004",
    },
    Exhibit {
        url: "https://raw.githubusercontent.com/KUROSUPARKER/asset-cparmuseum/refs/heads/main/chadsdasdsa).png",
        position: [-2.0, 0.0, 2.75],
        yaw: SIDE_YAW,
        label: "a-girl-in-the-farm\ndollisen\ncoffee-painting\nE5005",
    },
    Exhibit {
        url: "https://raw.githubusercontent.com/KUROSUPARKER/asset-cparmuseum/refs/heads/main/MUYARGASdreamhouse.jpg",
        position: [1.75, 0.0, 0.25],
        yaw: -SIDE_YAW,
        label: "-aeroplane-\nmuyargas-group\nassemblage\nF6006",
    },
    Exhibit {
        url: "https://raw.githubusercontent.com/KUROSUPARKER/asset-cparmuseum/refs/heads/main/BARREDOASSEMBLAGE.png",
        position: [2.15, 0.0, 1.5],
        yaw: -SIDE_YAW,
        label: "-untitled-\nbarredo-group\nassemblage\nG7007",
    },
    Exhibit {
        url: "https://raw.githubusercontent.com/KUROSUPARKER/asset-cparmuseum/refs/heads/main/TORRESSSSSSSSSSS.png",
        position: [2.0, 0.0, 2.75],
        yaw: -SIDE_YAW,
        label: "rootbeer car\ntorres-group\nle assemblage\nH8008",
    },
];

/// The hall's fixed hanging plan, in layout order.
pub fn exhibits() -> Vec<FrameSpec> {
    HALL.iter()
        .map(|e| {
            FrameSpec::new(
                e.url,
                Vec3::from_array(e.position),
                Vec3::new(0.0, e.yaw, 0.0),
                e.label,
            )
        })
        .collect()
}
