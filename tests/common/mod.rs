// tests/common/mod.rs
//
// Dublês em memória dos colaboradores externos do painel: capacidade
// remota com contagem de chamadas e falha injetável, predicado de grupos,
// canal de avisos gravado e confirmação fixável.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

use anyhow::anyhow;
use async_trait::async_trait;
use serde_json::{Value, json};

use controle_clientes::api::{FiltroLista, RecursoRemoto, registro::RegistroApis};
use controle_clientes::auth::ProvedorAutorizacao;
use controle_clientes::common::error::ErroRemoto;
use controle_clientes::config::ConfiguracaoPainel;
use controle_clientes::notificacao::{CanalNotificacao, ConfirmacaoExclusao, IdAviso};
use controle_clientes::services::painel::PainelClientes;

pub fn iniciar_log() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("controle_clientes=debug")
        .with_test_writer()
        .try_init();
}

// --- RECURSO REMOTO FALSO ---

pub struct RecursoFake {
    lista: Mutex<Value>,
    pub chamadas_listar: AtomicUsize,
    pub criados: Mutex<Vec<Value>>,
    pub atualizados: Mutex<Vec<(i64, Value)>>,
    pub excluidos: Mutex<Vec<i64>>,
    falhar_listar: AtomicBool,
    falhar_escrita: AtomicBool,
    proximo_id: AtomicU64,
}

impl RecursoFake {
    pub fn com_lista(lista: Value) -> Arc<Self> {
        Arc::new(Self {
            lista: Mutex::new(lista),
            chamadas_listar: AtomicUsize::new(0),
            criados: Mutex::new(Vec::new()),
            atualizados: Mutex::new(Vec::new()),
            excluidos: Mutex::new(Vec::new()),
            falhar_listar: AtomicBool::new(false),
            falhar_escrita: AtomicBool::new(false),
            proximo_id: AtomicU64::new(1000),
        })
    }

    pub fn vazio() -> Arc<Self> {
        Self::com_lista(json!([]))
    }

    pub fn definir_lista(&self, lista: Value) {
        *self.lista.lock().unwrap() = lista;
    }

    pub fn falhar_listar(&self, falhar: bool) {
        self.falhar_listar.store(falhar, Ordering::SeqCst);
    }

    pub fn falhar_escrita(&self, falhar: bool) {
        self.falhar_escrita.store(falhar, Ordering::SeqCst);
    }

    pub fn total_listagens(&self) -> usize {
        self.chamadas_listar.load(Ordering::SeqCst)
    }

    pub fn total_criados(&self) -> usize {
        self.criados.lock().unwrap().len()
    }

    pub fn total_excluidos(&self) -> usize {
        self.excluidos.lock().unwrap().len()
    }
}

#[async_trait]
impl RecursoRemoto for RecursoFake {
    async fn listar(&self, _filtro: FiltroLista) -> Result<Value, ErroRemoto> {
        if self.falhar_listar.load(Ordering::SeqCst) {
            return Err(ErroRemoto::Transporte(anyhow!("falha simulada de listagem")));
        }
        self.chamadas_listar.fetch_add(1, Ordering::SeqCst);
        Ok(self.lista.lock().unwrap().clone())
    }

    async fn criar(&self, dados: Value) -> Result<Value, ErroRemoto> {
        if self.falhar_escrita.load(Ordering::SeqCst) {
            return Err(ErroRemoto::Rejeitado("falha simulada de escrita".into()));
        }
        self.criados.lock().unwrap().push(dados.clone());
        let id = self.proximo_id.fetch_add(1, Ordering::SeqCst);
        let mut registro = dados;
        if let Value::Object(campos) = &mut registro {
            campos.insert("id".into(), json!(id));
        }
        Ok(registro)
    }

    async fn atualizar(&self, id: i64, dados: Value) -> Result<Value, ErroRemoto> {
        if self.falhar_escrita.load(Ordering::SeqCst) {
            return Err(ErroRemoto::Rejeitado("falha simulada de escrita".into()));
        }
        self.atualizados.lock().unwrap().push((id, dados.clone()));
        Ok(dados)
    }

    async fn excluir(&self, id: i64) -> Result<(), ErroRemoto> {
        if self.falhar_escrita.load(Ordering::SeqCst) {
            return Err(ErroRemoto::Rejeitado("falha simulada de escrita".into()));
        }
        self.excluidos.lock().unwrap().push(id);
        Ok(())
    }
}

// --- AUTORIZAÇÃO FALSA ---

pub struct AutorizacaoFake {
    grupos: Vec<String>,
}

impl AutorizacaoFake {
    pub fn com_grupos(grupos: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            grupos: grupos.iter().map(|grupo| grupo.to_string()).collect(),
        })
    }
}

impl ProvedorAutorizacao for AutorizacaoFake {
    fn possui_grupo(&self, grupo: &str) -> bool {
        self.grupos.iter().any(|meu| meu == grupo)
    }
}

// --- AVISOS GRAVADOS ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Aviso {
    Carregando(String),
    Sucesso(String),
    Erro(String),
    Dispensado(u64),
}

#[derive(Default)]
pub struct AvisosGravados {
    eventos: Mutex<Vec<Aviso>>,
    proximo_id: AtomicU64,
}

impl AvisosGravados {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn eventos(&self) -> Vec<Aviso> {
        self.eventos.lock().unwrap().clone()
    }

    pub fn erros(&self) -> Vec<String> {
        self.eventos()
            .into_iter()
            .filter_map(|aviso| match aviso {
                Aviso::Erro(mensagem) => Some(mensagem),
                _ => None,
            })
            .collect()
    }

    pub fn sucessos(&self) -> Vec<String> {
        self.eventos()
            .into_iter()
            .filter_map(|aviso| match aviso {
                Aviso::Sucesso(mensagem) => Some(mensagem),
                _ => None,
            })
            .collect()
    }
}

impl CanalNotificacao for AvisosGravados {
    fn carregando(&self, mensagem: &str) -> IdAviso {
        let id = self.proximo_id.fetch_add(1, Ordering::SeqCst);
        self.eventos
            .lock()
            .unwrap()
            .push(Aviso::Carregando(mensagem.to_string()));
        IdAviso(id)
    }

    fn sucesso(&self, mensagem: &str) {
        self.eventos
            .lock()
            .unwrap()
            .push(Aviso::Sucesso(mensagem.to_string()));
    }

    fn erro(&self, mensagem: &str) {
        self.eventos
            .lock()
            .unwrap()
            .push(Aviso::Erro(mensagem.to_string()));
    }

    fn dispensar(&self, id: IdAviso) {
        self.eventos.lock().unwrap().push(Aviso::Dispensado(id.0));
    }
}

// --- CONFIRMAÇÃO FIXÁVEL ---

pub struct ConfirmacaoFixa {
    resposta: AtomicBool,
}

impl ConfirmacaoFixa {
    pub fn respondendo(resposta: bool) -> Arc<Self> {
        Arc::new(Self {
            resposta: AtomicBool::new(resposta),
        })
    }

    pub fn definir(&self, resposta: bool) {
        self.resposta.store(resposta, Ordering::SeqCst);
    }
}

impl ConfirmacaoExclusao for ConfirmacaoFixa {
    fn confirmar(&self, _mensagem: &str) -> bool {
        self.resposta.load(Ordering::SeqCst)
    }
}

// --- CENÁRIO PADRÃO ---

// Um cliente "Acme" (id 7) com duas unidades e um setor na primeira.
// A lista de contratos responde paginada de propósito: as duas formas de
// resposta precisam conviver no mesmo snapshot.
pub struct Cenario {
    pub clientes: Arc<RecursoFake>,
    pub contratos: Arc<RecursoFake>,
    pub unidades: Arc<RecursoFake>,
    pub setores: Arc<RecursoFake>,
    pub aprovadores: Arc<RecursoFake>,
    pub solicitantes: Arc<RecursoFake>,
    pub opcoes_espec_cq: Arc<RecursoFake>,
    pub avisos: Arc<AvisosGravados>,
    pub confirmacao: Arc<ConfirmacaoFixa>,
}

impl Cenario {
    pub fn padrao() -> Self {
        iniciar_log();
        Self {
            clientes: RecursoFake::com_lista(json!([
                { "id": 7, "nome": "Acme", "hh_valor_fabricacao": 10.0 }
            ])),
            contratos: RecursoFake::com_lista(json!({ "count": 0, "results": [] })),
            unidades: RecursoFake::com_lista(json!([
                { "id": 1, "cliente": 7, "nome": "U1" },
                { "id": 2, "cliente": 7, "nome": "U2" }
            ])),
            setores: RecursoFake::com_lista(json!([
                { "id": 9, "cliente": 7, "unidade": 1, "nome": "S1" }
            ])),
            aprovadores: RecursoFake::vazio(),
            solicitantes: RecursoFake::vazio(),
            opcoes_espec_cq: RecursoFake::vazio(),
            avisos: AvisosGravados::new(),
            confirmacao: ConfirmacaoFixa::respondendo(true),
        }
    }

    pub fn registro(&self) -> RegistroApis {
        RegistroApis {
            contratos: self.contratos.clone(),
            unidades: self.unidades.clone(),
            setores: self.setores.clone(),
            aprovadores: self.aprovadores.clone(),
            solicitantes: self.solicitantes.clone(),
            opcoes_espec_cq: self.opcoes_espec_cq.clone(),
        }
    }

    pub fn painel(&self, grupos: &[&str]) -> PainelClientes {
        PainelClientes::new(
            self.clientes.clone(),
            self.registro(),
            AutorizacaoFake::com_grupos(grupos),
            self.avisos.clone(),
            self.confirmacao.clone(),
            &ConfiguracaoPainel::default(),
        )
    }
}
