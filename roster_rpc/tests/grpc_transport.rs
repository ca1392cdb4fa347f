use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;

use roster_app::{
    endpoints::Endpoints,
    service::RosterService,
    test_utils::{MockPlayerRepository, player_factory},
};
use roster_rpc::{
    RpcServer,
    pb::{self, players_client::PlayersClient},
};

/// Starts the gRPC server on an ephemeral port and returns its URL.
async fn spawn_server(repo: MockPlayerRepository) -> String {
    let service = Arc::new(RosterService::new(Arc::new(repo)));
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(RpcServer::serve_listener(Endpoints::new(service), listener));

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_players_over_the_wire() {
    let repo = MockPlayerRepository::with_players(vec![player_factory("Blake Bortles", "5", "QB")]);
    let url = spawn_server(repo.clone()).await;
    let mut client = PlayersClient::connect(url).await.unwrap();

    let reply = client
        .list_players(pb::ListPlayersRequest {
            position: "QB".to_string(),
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(reply.players.len(), 1);
    assert!(reply.err.is_empty());

    let reply = client
        .save_player(pb::SavePlayerRequest {
            player: Some(pb::Player {
                name: "Jalen Ramsey".to_string(),
                number: "20".to_string(),
                position: "CB".to_string(),
                ..Default::default()
            }),
        })
        .await
        .unwrap()
        .into_inner();
    assert!(reply.created);
    assert_eq!(reply.player.unwrap().id, 2);

    let reply = client
        .get_player(pb::GetPlayerRequest { id: 2 })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(reply.player.unwrap().name, "Jalen Ramsey");

    let reply = client
        .delete_player(pb::DeletePlayerRequest { id: 2 })
        .await
        .unwrap()
        .into_inner();
    assert!(reply.err.is_empty());
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_errors_over_the_wire() {
    let url = spawn_server(MockPlayerRepository::new()).await;
    let mut client = PlayersClient::connect(url).await.unwrap();

    let reply = client
        .get_player(pb::GetPlayerRequest { id: 1 })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(reply.err, "not found");

    let status = client
        .save_player(pb::SavePlayerRequest { player: None })
        .await
        .unwrap_err();
    assert_eq!(status.code(), tonic::Code::InvalidArgument);
}
