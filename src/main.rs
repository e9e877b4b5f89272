use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use kubeview_k8s::KubeClient;
use kubeview_server::ServerConfig;

/// Kubeview - A read-only HTTP view of Kubernetes nodes and pods
///
/// Cluster access comes from KUBECONFIG, ~/.kube/config or the in-cluster
/// service account. Listens on port 8080 and serves ./index.html for
/// every path other than /nodes and /pods.
#[derive(Parser, Debug)]
#[command(name = "kubeview")]
#[command(author, version, about)]
struct Args {}

#[tokio::main]
async fn main() {
    let _args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Without a client no endpoint can work, so this is fatal
    let kube_client = KubeClient::new().await?;

    kubeview_server::serve(Arc::new(kube_client), ServerConfig::default()).await
}
