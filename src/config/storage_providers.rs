use crate::types::RateTier;

// Storage prices are USD per GB-month, transfer is USD per GB.
// Volume bands are in GB, 50 TB is written as 50_000.

pub struct StorageEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub classes: &'static [ClassEntry],
    pub transfer_rate: f64,
}

pub struct ClassEntry {
    pub name: &'static str,
    pub tiers: &'static [RateTier],
}

pub static STORAGE_PROVIDERS: &[StorageEntry] = &[
    StorageEntry {
        id: "aws-s3",
        name: "Amazon S3",
        classes: &[ClassEntry {
            name: "Standard",
            tiers: &[
                RateTier::new(0.0, 0.023),
                RateTier::new(50_000.0, 0.022),
                RateTier::new(500_000.0, 0.021),
            ],
        }],
        transfer_rate: 0.09,
    },
    StorageEntry {
        id: "digitalocean-spaces",
        name: "DigitalOcean Spaces",
        classes: &[ClassEntry {
            name: "Standard",
            tiers: &[RateTier::new(0.0, 0.02), RateTier::new(250.0, 0.02)],
        }],
        transfer_rate: 0.01,
    },
    StorageEntry {
        id: "google-cloud-storage",
        name: "Google Cloud Storage",
        classes: &[
            ClassEntry {
                name: "Standard",
                tiers: &[RateTier::new(0.0, 0.020)],
            },
            ClassEntry {
                name: "Nearline",
                tiers: &[RateTier::new(0.0, 0.010)],
            },
            ClassEntry {
                name: "Coldline",
                tiers: &[RateTier::new(0.0, 0.004)],
            },
            ClassEntry {
                name: "Archive",
                tiers: &[RateTier::new(0.0, 0.0012)],
            },
        ],
        transfer_rate: 0.12,
    },
    StorageEntry {
        id: "azure-blob",
        name: "Azure Blob Storage",
        classes: &[
            ClassEntry {
                name: "Premium",
                tiers: &[RateTier::new(0.0, 0.15)],
            },
            ClassEntry {
                name: "Hot",
                tiers: &[RateTier::new(0.0, 0.018)],
            },
            ClassEntry {
                name: "Cool",
                tiers: &[RateTier::new(0.0, 0.01)],
            },
            ClassEntry {
                name: "Cold",
                tiers: &[RateTier::new(0.0, 0.0036)],
            },
            ClassEntry {
                name: "Archive",
                tiers: &[RateTier::new(0.0, 0.002)],
            },
        ],
        transfer_rate: 0.087,
    },
];
