// src/services/painel.rs
//
// A camada de composição: orquestra a lista de clientes, a sessão de
// edição do agregado e os modais de entidade dependente, emitindo avisos
// ao redor das operações remotas. Nenhuma tentativa automática: uma falha
// é reportada uma vez e fica por conta do usuário tentar de novo.

use std::sync::Arc;

use anyhow::anyhow;
use serde_json::Value;
use validator::Validate;

use crate::api::{FiltroLista, RecursoRemoto, desembrulhar_lista, registro::RegistroApis};
use crate::auth::{PoliticaAcesso, ProvedorAutorizacao};
use crate::common::error::AppError;
use crate::config::ConfiguracaoPainel;
use crate::models::clientes::{Cliente, FormularioCliente, TipoEntidade};
use crate::notificacao::{CanalNotificacao, ConfirmacaoExclusao};
use crate::services::agrupamento::{GrupoSetores, agrupar_setores_por_unidade};
use crate::services::carregador::CarregadorDependentes;
use crate::services::modal::EditorModal;
use crate::services::sessao::{EstadoSessao, SessaoEdicao};

pub struct PainelClientes {
    api_clientes: Arc<dyn RecursoRemoto>,
    apis: RegistroApis,
    carregador: CarregadorDependentes,
    politica: PoliticaAcesso,
    auth: Arc<dyn ProvedorAutorizacao>,
    avisos: Arc<dyn CanalNotificacao>,
    confirmacao: Arc<dyn ConfirmacaoExclusao>,
    clientes: Vec<Cliente>,
    sessao: SessaoEdicao,
    modal: EditorModal,
}

impl PainelClientes {
    pub fn new(
        api_clientes: Arc<dyn RecursoRemoto>,
        apis: RegistroApis,
        auth: Arc<dyn ProvedorAutorizacao>,
        avisos: Arc<dyn CanalNotificacao>,
        confirmacao: Arc<dyn ConfirmacaoExclusao>,
        config: &ConfiguracaoPainel,
    ) -> Self {
        Self {
            carregador: CarregadorDependentes::new(apis.clone()),
            politica: PoliticaAcesso::new(config),
            api_clientes,
            apis,
            auth,
            avisos,
            confirmacao,
            clientes: Vec::new(),
            sessao: SessaoEdicao::new(),
            modal: EditorModal::new(),
        }
    }

    // --- ACESSO ---

    /// A tela inteira é restrita: sem um grupo de gestão não há o que exibir.
    pub fn pode_gerenciar(&self) -> bool {
        self.politica.pode_gerenciar(self.auth.as_ref())
    }

    // --- LISTA DE CLIENTES ---

    pub async fn carregar_clientes(&mut self) -> Result<(), AppError> {
        let resposta = self.api_clientes.listar(FiltroLista::default()).await?;
        self.clientes = desembrulhar_lista(resposta)?;
        tracing::info!(total = self.clientes.len(), "clientes carregados");
        Ok(())
    }

    pub fn clientes(&self) -> &[Cliente] {
        &self.clientes
    }

    // --- SESSÃO DE EDIÇÃO ---

    pub fn sessao(&self) -> &SessaoEdicao {
        &self.sessao
    }

    pub fn formulario_mut(&mut self) -> &mut FormularioCliente {
        self.sessao.formulario_mut()
    }

    pub fn iniciar_novo_cliente(&mut self) {
        // Iniciar outra sessão descarta qualquer rascunho de modal pendente.
        self.modal.fechar();
        self.sessao.iniciar_novo();
    }

    /// Entra em edição e carrega o snapshot das seis coleções dependentes.
    /// A carga é tudo-ou-nada: em caso de falha a sessão continua em
    /// edição, com o snapshot vazio, e o erro sobe para a interface.
    pub async fn iniciar_edicao(&mut self, cliente: &Cliente) -> Result<(), AppError> {
        self.modal.fechar();
        let geracao = self.sessao.iniciar_edicao(cliente);
        let colecoes = self.carregador.carregar_tudo(cliente.id).await?;
        self.sessao.instalar_dependentes(geracao, colecoes);
        Ok(())
    }

    /// Variante por id, sobre a lista já carregada.
    pub async fn iniciar_edicao_por_id(&mut self, cliente_id: i64) -> Result<(), AppError> {
        let cliente = self
            .clientes
            .iter()
            .find(|cliente| cliente.id == cliente_id)
            .cloned()
            .ok_or_else(|| {
                AppError::Interno(anyhow!("cliente {cliente_id} não está na lista carregada"))
            })?;
        self.iniciar_edicao(&cliente).await
    }

    pub fn cancelar_edicao(&mut self) {
        self.modal.fechar();
        self.sessao.cancelar();
    }

    /// Valida o rascunho e despacha criação (sessão nova) ou atualização
    /// (sessão de edição). No sucesso a lista é recarregada e a sessão
    /// volta ao ocioso; na falha tudo fica como está para nova tentativa.
    pub async fn salvar_cliente(&mut self) -> Result<(), AppError> {
        let cliente_em_edicao = self.sessao.cliente_em_edicao();
        if cliente_em_edicao.is_none() && self.sessao.estado() != EstadoSessao::CriandoNovo {
            return Err(AppError::SessaoInvalida);
        }

        self.sessao.formulario().validate()?;
        let dados = serde_json::to_value(self.sessao.formulario())
            .map_err(|erro| AppError::Interno(erro.into()))?;

        let aviso = self.avisos.carregando("Salvando cliente...");
        let resultado = match cliente_em_edicao {
            None => self.api_clientes.criar(dados).await.map(|_| ()),
            Some(cliente_id) => self
                .api_clientes
                .atualizar(cliente_id, dados)
                .await
                .map(|_| ()),
        };

        match resultado {
            Ok(()) => {
                self.avisos.dispensar(aviso);
                self.avisos.sucesso(if cliente_em_edicao.is_none() {
                    "Cliente criado com sucesso!"
                } else {
                    "Cliente atualizado com sucesso!"
                });
                if let Err(erro) = self.carregar_clientes().await {
                    tracing::error!(%erro, "cliente salvo, mas a lista não pôde ser recarregada");
                }
                self.cancelar_edicao();
                Ok(())
            }
            Err(erro) => {
                self.avisos.dispensar(aviso);
                self.avisos
                    .erro("Erro ao salvar cliente. Verifique os dados e tente novamente.");
                Err(erro.into())
            }
        }
    }

    /// Exclusão de cliente: só o grupo de exclusão, e só após confirmação.
    pub async fn excluir_cliente(&mut self, id: i64) -> Result<(), AppError> {
        if !self.politica.pode_excluir(self.auth.as_ref()) {
            let mensagem = "Apenas administradores podem excluir clientes.";
            self.avisos.erro(mensagem);
            return Err(AppError::Autorizacao(mensagem.into()));
        }
        if !self
            .confirmacao
            .confirmar("Tem certeza que deseja excluir este cliente?")
        {
            return Ok(());
        }

        let aviso = self.avisos.carregando("Excluindo cliente...");
        let resultado = self.api_clientes.excluir(id).await;
        match resultado {
            Ok(()) => {
                if let Err(erro) = self.carregar_clientes().await {
                    tracing::error!(%erro, "cliente excluído, mas a lista não pôde ser recarregada");
                }
                self.avisos.dispensar(aviso);
                self.avisos.sucesso("Cliente excluído com sucesso!");
                Ok(())
            }
            Err(erro) => {
                self.avisos.dispensar(aviso);
                self.avisos.erro("Erro ao excluir cliente.");
                Err(erro.into())
            }
        }
    }

    // --- MODAL DE ENTIDADE DEPENDENTE ---

    pub fn modal(&self) -> &EditorModal {
        &self.modal
    }

    pub fn abrir_modal(&mut self, tipo: TipoEntidade, registro: Value) {
        self.modal.abrir(tipo, registro);
    }

    pub fn fechar_modal(&mut self) {
        self.modal.fechar();
    }

    pub fn definir_campo_modal(&mut self, nome: &str, valor: Value) {
        self.modal.definir_campo(nome, valor);
    }

    /// Persiste o rascunho do modal na coleção do tipo aberto. Validações
    /// locais (inclusive as regras de setor) acontecem antes de qualquer
    /// chamada remota; no sucesso o snapshot inteiro é recarregado e o
    /// modal fecha, na falha ele continua aberto com o rascunho intacto.
    pub async fn salvar_entidade(&mut self) -> Result<(), AppError> {
        let Some(cliente_id) = self.sessao.cliente_em_edicao() else {
            return Err(AppError::SessaoInvalida);
        };

        let montagem = self
            .modal
            .montar_dados(cliente_id, &self.sessao.dependentes().unidades);
        let (tipo, dados) = match montagem {
            Ok(montado) => montado,
            Err(erro) => {
                self.avisos.erro(&erro.to_string());
                return Err(erro);
            }
        };

        let recurso = Arc::clone(self.apis.recurso(tipo));
        let atualizando = self.modal.id_em_edicao();
        let resultado = match atualizando {
            Some(id) => recurso.atualizar(id, dados).await.map(|_| ()),
            None => recurso.criar(dados).await.map(|_| ()),
        };

        match resultado {
            Ok(()) => {
                self.avisos.sucesso(if atualizando.is_some() {
                    "Item atualizado com sucesso!"
                } else {
                    "Item criado com sucesso!"
                });
                self.recarregar_dependentes().await;
                self.modal.fechar();
                Ok(())
            }
            Err(erro) => {
                self.avisos
                    .erro("Erro ao salvar. Verifique os dados e tente novamente.");
                Err(erro.into())
            }
        }
    }

    /// Exclusão de item dependente, com o mesmo gate de grupo da exclusão
    /// de cliente. Na falha remota o snapshot fica como estava — desatualizado,
    /// porém consistente.
    pub async fn excluir_entidade(
        &mut self,
        tipo: TipoEntidade,
        id: i64,
    ) -> Result<(), AppError> {
        if !self.politica.pode_excluir(self.auth.as_ref()) {
            let mensagem = "Apenas administradores podem excluir itens.";
            self.avisos.erro(mensagem);
            return Err(AppError::Autorizacao(mensagem.into()));
        }
        if !self
            .confirmacao
            .confirmar("Tem certeza que deseja excluir este item?")
        {
            return Ok(());
        }
        if self.sessao.cliente_em_edicao().is_none() {
            return Err(AppError::SessaoInvalida);
        }

        let recurso = Arc::clone(self.apis.recurso(tipo));
        let resultado = recurso.excluir(id).await;
        match resultado {
            Ok(()) => {
                self.recarregar_dependentes().await;
                self.avisos.sucesso("Item excluído com sucesso!");
                Ok(())
            }
            Err(erro) => {
                self.avisos.erro("Erro ao excluir item.");
                Err(erro.into())
            }
        }
    }

    // --- APRESENTAÇÃO ---

    /// Setores agrupados pela unidade dona, para a seção de setores da tela.
    pub fn grupos_setores(&self) -> Vec<GrupoSetores<'_>> {
        let dependentes = self.sessao.dependentes();
        agrupar_setores_por_unidade(&dependentes.setores, &dependentes.unidades)
    }

    // Recarrega o snapshot após uma escrita bem-sucedida. Uma falha aqui
    // não desfaz a escrita: mantém o snapshot anterior e registra o erro.
    async fn recarregar_dependentes(&mut self) {
        let Some(cliente_id) = self.sessao.cliente_em_edicao() else {
            return;
        };
        let geracao = self.sessao.geracao_atual();
        let resultado = self.carregador.carregar_tudo(cliente_id).await;
        match resultado {
            Ok(colecoes) => {
                self.sessao.instalar_dependentes(geracao, colecoes);
            }
            Err(erro) => {
                tracing::error!(
                    %erro,
                    cliente_id,
                    "falha ao recarregar entidades dependentes; snapshot anterior mantido"
                );
            }
        }
    }
}
