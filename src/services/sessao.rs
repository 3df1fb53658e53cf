// src/services/sessao.rs

use uuid::Uuid;

use crate::models::clientes::{Cliente, ColecoesDependentes, FormularioCliente};

// --- ESTADOS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstadoSessao {
    /// Nenhum cliente em edição.
    Ocioso,
    /// Rascunho de um cliente novo; dependentes não se aplicam.
    CriandoNovo,
    /// Editando um cliente existente, com o snapshot de dependentes dele.
    Editando { cliente_id: i64 },
}

/// O contexto único de edição compartilhado pelo painel e pelos modais.
/// Só existe uma sessão por vez: iniciar outra descarta a anterior.
#[derive(Debug)]
pub struct SessaoEdicao {
    estado: EstadoSessao,
    formulario: FormularioCliente,
    dependentes: ColecoesDependentes,
    // Carimbo da carga em andamento. Uma resposta que chegar depois de a
    // sessão mudar apresenta carimbo antigo e é descartada na instalação,
    // para nunca misturar dependentes de dois clientes.
    geracao: Uuid,
}

impl Default for SessaoEdicao {
    fn default() -> Self {
        Self {
            estado: EstadoSessao::Ocioso,
            formulario: FormularioCliente::default(),
            dependentes: ColecoesDependentes::default(),
            geracao: Uuid::new_v4(),
        }
    }
}

impl SessaoEdicao {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn estado(&self) -> EstadoSessao {
        self.estado
    }

    pub fn formulario(&self) -> &FormularioCliente {
        &self.formulario
    }

    pub fn formulario_mut(&mut self) -> &mut FormularioCliente {
        &mut self.formulario
    }

    pub fn dependentes(&self) -> &ColecoesDependentes {
        &self.dependentes
    }

    pub fn cliente_em_edicao(&self) -> Option<i64> {
        match self.estado {
            EstadoSessao::Editando { cliente_id } => Some(cliente_id),
            _ => None,
        }
    }

    pub fn geracao_atual(&self) -> Uuid {
        self.geracao
    }

    /// Entra em criação de cliente novo, com o rascunho nos padrões.
    pub fn iniciar_novo(&mut self) {
        self.estado = EstadoSessao::CriandoNovo;
        self.formulario = FormularioCliente::default();
        self.dependentes = ColecoesDependentes::default();
        self.geracao = Uuid::new_v4();
    }

    /// Entra em edição do cliente e devolve o carimbo que a carga de
    /// dependentes deve apresentar em `instalar_dependentes`. O snapshot
    /// anterior é descartado na hora: a tela nunca mostra dependentes de
    /// um cliente sob o formulário de outro.
    pub fn iniciar_edicao(&mut self, cliente: &Cliente) -> Uuid {
        self.estado = EstadoSessao::Editando {
            cliente_id: cliente.id,
        };
        self.formulario = FormularioCliente::de_cliente(cliente);
        self.dependentes = ColecoesDependentes::default();
        self.geracao = Uuid::new_v4();
        self.geracao
    }

    /// Instala o snapshot carregado, desde que o carimbo ainda seja o da
    /// sessão ativa. Devolve `false` quando a resposta chegou tarde e foi
    /// descartada.
    pub fn instalar_dependentes(
        &mut self,
        geracao: Uuid,
        colecoes: ColecoesDependentes,
    ) -> bool {
        let em_edicao = matches!(self.estado, EstadoSessao::Editando { .. });
        if geracao != self.geracao || !em_edicao {
            tracing::warn!(
                %geracao,
                "snapshot de dependentes descartado: a sessão mudou durante a carga"
            );
            return false;
        }
        self.dependentes = colecoes;
        true
    }

    /// Abandona a edição: rascunho e snapshot voltam ao vazio.
    pub fn cancelar(&mut self) {
        self.estado = EstadoSessao::Ocioso;
        self.formulario = FormularioCliente::default();
        self.dependentes = ColecoesDependentes::default();
        self.geracao = Uuid::new_v4();
    }
}
